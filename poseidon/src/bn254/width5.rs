//! Parameters for the state width 5 permutation (4 inputs).

use ark_bn254::Fr;
use ark_ff::MontFp;

pub const WIDTH: usize = 5;

pub const ROUNDS_PARTIAL: usize = 60;

pub const ROUND_CONSTANTS: [Fr; 100] = [
    MontFp!("6652655389322448471317061533546982911992554640679550674058582942754771150993"),
    MontFp!("2411464732857349694082092299330329691469354396507353145272547491824343787723"),
    MontFp!("21491443688002139478732659842894153142870918973450440713149176834049574486740"),
    MontFp!("20196926676989483530222124573030747187074792043523478381149800153065505592963"),
    MontFp!("12986278951352369831003505493892366673723882190521699331613883287145355738793"),
    MontFp!("4798833223532921387467005183793553407373303974561583274003794658257727025059"),
    MontFp!("13496463093649217801159669322206659855703017017408624838916381852178574806890"),
    MontFp!("16590986609113675009103450661602602826715339983313813670111587439107698385888"),
    MontFp!("5937994710904778261029019775898504331191968780807927886723469555546010951024"),
    MontFp!("6340307186463772741943754228050687278089442629424897588966624749149407515717"),
    MontFp!("18670788612599045923587945257444976036844807867039666769427927259821124649437"),
    MontFp!("1600094500072257955914089781088885427013593980638316882935771065111900048019"),
    MontFp!("11036405280021403966086345217611211539242761235291924168758143844759492428445"),
    MontFp!("8935124712367436762227424592913543013188984596574150964555450654569136074761"),
    MontFp!("6463237208844857763133252434914853708168954854264514970034874031179454382039"),
    MontFp!("6765298747866693599234729768608936636203916519332928482931997801908970355416"),
    MontFp!("13205227823642751138021061207464813797132764868396804824660048424787221024229"),
    MontFp!("4790991011028976932944399444798402678000379129348886521554922684293329103929"),
    MontFp!("7010495948730597794503107423628629422409993499229927591745883758146425107104"),
    MontFp!("17445358887740153603392857392704961153174765020032942002330445016568366087040"),
    MontFp!("917862985595147477036635483219834698869689565312132226007481531934827553291"),
    MontFp!("18965404350891074828770942819427665504720621416530166937725085013394138414732"),
    MontFp!("3934014569535322244570384238754619186471039675178033436272867482986560092845"),
    MontFp!("16967761276323915814439548600910677348712512339713520905439323519775920148368"),
    MontFp!("13680885919870320461754778808321543106775967763560467917584385565064498449254"),
    MontFp!("14904988850926055936978668216446632951021532572909675194431888793994684806216"),
    MontFp!("6312868873905355698446651569414485682296936237842940641183377719657136897124"),
    MontFp!("1221394717601612502649453408160823773964057580107020946286106810534833449011"),
    MontFp!("12498490732340759187577697005358733972375092308670965429586126160711345931975"),
    MontFp!("1167473907165888737864111689041751781393405346022919423626008029319761886800"),
    MontFp!("1391291527810780311524211646384648532139733181610638818089022323986983696033"),
    MontFp!("18315001777022404460772073096939512447318285162517238424032194418213313047649"),
    MontFp!("17138744004792557303411247577635950581797520203797688879672232683429462361790"),
    MontFp!("8464136821548705572162460439744054077981900652173173127373435569115427724433"),
    MontFp!("6325611540527282491963337196507778333710818359952260256813685845967323725237"),
    MontFp!("18031267793736274778671680299232367380985146377207966784444415334715849895408"),
    MontFp!("5598407816470136531717487204099460530222313912578709217190129574753132812095"),
    MontFp!("21195166371413351961567927271799270070143891198308374872595245523147646911186"),
    MontFp!("4961695868990521943403033719618765766592165121760152617058439319892397986274"),
    MontFp!("8196634838366685381135983070410923076432741797388219559527445148169864217936"),
    MontFp!("13858281882365206899360019697246602483237413583407879526222936112290436837262"),
    MontFp!("4404993261726381899703050429093394739232383862299981317264289163868454881278"),
    MontFp!("4120841951345622029813223403726410393677845775212048262378081697310308045875"),
    MontFp!("5062783693673911400911087940408526272156142023095517888283788876114048428447"),
    MontFp!("14603247031709154915721125317793662977244791276962817357615506815510241306599"),
    MontFp!("14431564859376021515445316100569445538878809470082722023511211102840711566781"),
    MontFp!("9750162460539905520618358772953783828473249964673031754004133155927912207728"),
    MontFp!("11571027484496271061840894415330035058038256013233223763198947286795572963691"),
    MontFp!("12386152361984237513723760077633711745282202324702771505288217727695009574429"),
    MontFp!("909198644424809409194288869068946559468634345802419402369143758403459185822"),
    MontFp!("16883246877539346444544508516908578939793471853383018572137636467628035214473"),
    MontFp!("12818331978405527075813942848943460006215277605684998270640794370639623086220"),
    MontFp!("6714939852474780489788076967878540463840244757465990796126365687288028319632"),
    MontFp!("496436185369983538010602957037862192011765359378581353710868670366130809973"),
    MontFp!("19198385248754190594350774471048558906452955245986896024071176404331929465029"),
    MontFp!("993835837758476964426455907584484044554718711848962272700310962853588654048"),
    MontFp!("6341458211051657282402019668744618421165901416506530473935815121557496163694"),
    MontFp!("4316367226625122700792772020622827718241784586782458138803262023761574568014"),
    MontFp!("17975650013834366156138309765086351913038012229854793647315317127152492421195"),
    MontFp!("17647713100552310633391671542713134691906082271202200649761636498536843672286"),
    MontFp!("15278563805211078018913529345256352748256406554852562736539755386578000061423"),
    MontFp!("19859886336650622013189723445924033403694487085553370789812038292750655809772"),
    MontFp!("20168657643672094397149931307073354757256890701792053446864451513073195854190"),
    MontFp!("6379770021569640039662400770530825128156336967736692316655468513023496315957"),
    MontFp!("14645274535960760922404249193481189028113873694427236708320110632375225399337"),
    MontFp!("13571307635613642963090146038599416132024816823260572043865295501689021730583"),
    MontFp!("4766520553882383237797349404232352574368238514843388945791773245428568905580"),
    MontFp!("1363041345789336349757034263046901285796358551001887835639375335431314499558"),
    MontFp!("3984711294644170418548989514468665682282463187527934730185867321425126621581"),
    MontFp!("16328324825459153667033489526483796999801168910778752244651866921722483015446"),
    MontFp!("116996844014996003731757744083137690339485843296556007988477016102441838518"),
    MontFp!("13730672703499301625714825076294879010520359359637717384917343022032378742104"),
    MontFp!("1876965826880262404385473996263525003780161961121765597836442537263778609530"),
    MontFp!("11134525029907498835981011646462910953206853706011606581699503445893679951494"),
    MontFp!("2226789229456120355863633812715339388896026900185817342073581120385234806639"),
    MontFp!("20300690590970835943349062352745116505791612404288378624430486360702743048205"),
    MontFp!("16495442857447985089886251639006593332296924074060502486848315286749754865332"),
    MontFp!("350656053426057463073517780889092374146286659653194183614794551107168934013"),
    MontFp!("12982058433339900901851733293881883615448746085204428019738434000297147401685"),
    MontFp!("11332699122478996391485236332651506991054019185242031851241706025306905185038"),
    MontFp!("11284107545760411844476712397893234442381550088960848681985209467358975008738"),
    MontFp!("9459946314347457844203432207024261309128275723032089735177725998352797353180"),
    MontFp!("18136112706989800636706610627685626634505661722356592834232932615270974229438"),
    MontFp!("16195324657531080463157028524025780104424532592149551702237215070958118361930"),
    MontFp!("3058282319709573096326538264036797846305592131471222415366677396412790333474"),
    MontFp!("11177875550857737762101409646853767594954772612247789607919216755096412290114"),
    MontFp!("14436545852233465965566213621676818206508109178458977872297047445164424533866"),
    MontFp!("11881924150142942590913343113868539013422285703424729931230802802244570329554"),
    MontFp!("1864432456602639802100737137202192460434300867330175842553844427798589603400"),
    MontFp!("14405716981057885636964036995449348559119987438554915531188333267835190728281"),
    MontFp!("10568696819754031607836794829601598580924283512232922514542428366953843662126"),
    MontFp!("4436624111602694267173720526508632891083477320089034325235715704374669064824"),
    MontFp!("8517227053576566130999557038635446923346511905504517378223948090168313807025"),
    MontFp!("7285036000320659333565368424394985632097467638111294864637160959305242235978"),
    MontFp!("7830268469079088962920730673608260234169515777138016648277607455715302520490"),
    MontFp!("13568679461545021371432472369249973082376977260860297825434513673523129723381"),
    MontFp!("18571802878024561632931224826674702828255674351828885114024174088071963635751"),
    MontFp!("4124752903556019579883588402541436446434324367584954786346391730782984462728"),
    MontFp!("20718285757028662347906419531659998894775372089454222458789525400002286904099"),
    MontFp!("18841650389232704522826360680335580244081862884973788413784880641267885014344"),
];

pub const SPARSE_MATRICES: [Fr; 540] = [
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("1501526742388787352232455928044474701049897539553693700465768980639111415979"),
    MontFp!("477229768268324623365003033158412143775099325596993204070284286071987300538"),
    MontFp!("8243001858704759090364941413206730131209305058842954450169141155865743978605"),
    MontFp!("4397851088763900198637364555730312600061451377499364821412487414413389946109"),
    MontFp!("829072012938774785647479320234263847800611389047503366548020632480104196507"),
    MontFp!("11973732876293340683132348260209027181896709528449190790967376946885918505502"),
    MontFp!("23392070560903044024099368768793195498392644445500960925932826504211820523"),
    MontFp!("1666179481282397378442030585243724981593933556713105419493290207535386445900"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("12130690958448979522535015129298334543754573199872087394038940475448436459004"),
    MontFp!("7780154231305740941703930233024584541330306153777268269852307746611379051871"),
    MontFp!("12337480241134454585621580821594251731320168455590607386412115324528211253470"),
    MontFp!("11457409947343511966044385197480136400382016660062371186643724520209164875444"),
    MontFp!("3471727057547016231600677077791546023644132664635724534602166413818984055994"),
    MontFp!("11148146531875596968055801958120583132944285831440996578847801627399689520030"),
    MontFp!("8989807282808289031853485110714508442192892161940367816959270341151974929824"),
    MontFp!("2022978884783955472039057035026391381160508591288758646838931506152922107435"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("4069515977166154493829242167754073432387580768160653052240581075063093999927"),
    MontFp!("18021800233501840930303726004140000082484859317133030438636634411145438034216"),
    MontFp!("13842864958932507560411341933439948906478882324997605583943232953472511632751"),
    MontFp!("20543729239120680311769892841106079006351032795831907144761844662229119932785"),
    MontFp!("15334502956074149972859345596459731980617288068265255908947788139262426624146"),
    MontFp!("12667853922828352752021307761902017354005285600097197887974522781310326230693"),
    MontFp!("18174768051830606775557647739651635043382362506480401085306081314420831068526"),
    MontFp!("3349607911920677989792348276386869043293039814394851806092079090713760703948"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("11122824194308457795909839968454415473638293426103209960568409884624648151513"),
    MontFp!("10893053234926971754856194952328133021754741749323149002196871360165965316826"),
    MontFp!("1290006662403392700836016762686721789875224356435575623288851130477204468588"),
    MontFp!("17202634571668511981904372694051390722368730419791596056810886318100520082950"),
    MontFp!("2580814574319203812178275712050706417009536336223124563742746291601979601222"),
    MontFp!("3771862018964445960978286990398067510641729209144178152474712042531022143638"),
    MontFp!("14533848538622138980749058466537702594314974600522176986306129080705178485870"),
    MontFp!("8543536329586735435500552362191802778970437354798958041429320031508234556443"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("7916391257241284823814555383146340684310990019751380906879678388396219051034"),
    MontFp!("5254028129115066618692161201986538856735386369393658321936271593510181089360"),
    MontFp!("6188649759963070802917000373766353622689432953656991813965583643287056971423"),
    MontFp!("4047224589112045880329435299312272000848233484526029400608220824915316166381"),
    MontFp!("3012677751539637724179453772391552006622766816890881067368860734753321626216"),
    MontFp!("14681573498800683804990986976522143387406104380970628605615080708691391323222"),
    MontFp!("16887781356799653260771967892472603255127133807803528736082570092254396357535"),
    MontFp!("332087876057409372707616557403513007906543330774664954878399745890468027527"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("13583663826294311941067718478103127969857643412096606904016661882077480834833"),
    MontFp!("11296627637009803321373380857035957698732148028861767862227691105627011904169"),
    MontFp!("21094673587292336559671505124385326502502368055257777838559756767620396250534"),
    MontFp!("18801112971457192341505931743788681380519148595743309092145497421278255424312"),
    MontFp!("954166585451165398738696460412214476058962342488001461181530307348803248299"),
    MontFp!("1071567030081504365972367542661733782241847299514402873858357308395290890188"),
    MontFp!("6314213820544565386673424477947854147941227384650597866799772062141557407009"),
    MontFp!("4206971929973484084571373618199466276864886139877103386672321962112356416645"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("17646171551167046226308316831067885895389003528272749726305078798088824451683"),
    MontFp!("11187624673008068522233908508776511489700020228921999690251436386931928340833"),
    MontFp!("2110109757981236035263622361426887689678184579841001377744197038464610843678"),
    MontFp!("10935354146352100538471201399209737181261211453304696472925823240547551399426"),
    MontFp!("15484917467091979711036789836818506171714372551651952050372717641291274355784"),
    MontFp!("3541519239473317105533472316108392385954421368004111447200098423244038916373"),
    MontFp!("12644355688486970260380033363565408247705578699125281607902825615062274845028"),
    MontFp!("8211387854588908783162901746465784933928221672797475892767321167563121716645"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("9838928147228780744577952602627233470313691659919660361505164223565814215003"),
    MontFp!("19681086278697528486123292142255871588731630543003907476832874417664933862604"),
    MontFp!("18262321740379654997324121749033997636384582785290949442354730980689974777818"),
    MontFp!("11803389261036181055781371008289686707520956566480237798250498009349532260087"),
    MontFp!("7655968008821678664702965598590842466363840882931396103685086506518088342615"),
    MontFp!("20034999428502446295824346656146521153128674548455507338442059695652258824743"),
    MontFp!("9857544089298222760072390576980180209117008141317203844889577534349151625137"),
    MontFp!("2204916338728504658953433576731453801158321962116563885601952409112442062316"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("10733019819712918010358480256693476348720535062095490597262934750006535754913"),
    MontFp!("13446061906986960996007098148631255493199926456525775643228991364387508806215"),
    MontFp!("13661095775768401731802329144454151128076991959534079391008648871692608337689"),
    MontFp!("7476377762322431408940702732975310156807461755344158344236259557725759452676"),
    MontFp!("7854011065608997331682826728845528993004713125420184787499914454569099527573"),
    MontFp!("1737332342558117577785925762057259398108370976990891634222264857471675390693"),
    MontFp!("16910942683677974196582990751262192353342786344296718770831872426723917724893"),
    MontFp!("18242708153420616375437948882856881435072401970663918155361749909836945373399"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("14731227395116937417560659545570066732387417467243766515237798698248103817295"),
    MontFp!("20119365046790991766201198011642978240887419183117364300110003787972065548357"),
    MontFp!("13543778364344563561426805023888409582420426522150295856215700562888897487706"),
    MontFp!("14464721402201141275935840393572275063294119352254854544225128982903587107956"),
    MontFp!("3882417517650148077054554603377635023747268522006594066393223698268227453173"),
    MontFp!("12079397048895462962972403901394553705319495249534046200253520252853914967458"),
    MontFp!("17024038123092401893496445746897926262623334816014822161708669709506654357001"),
    MontFp!("2859206037216566445752749240736482135649197874039564073611920940147052315302"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("5474698938450534544856045358569733916931219522889361142491265653675880727908"),
    MontFp!("9243984307986393797217093225350498352643146283318261277609088450714615900873"),
    MontFp!("12510628657189958626998952208012101002105531634156630190230289911264844789313"),
    MontFp!("3721592713855183158277511253821758709093760318977424124002212687860322153688"),
    MontFp!("19677668839734122265028762370993717773144778674987251600483828875703943308787"),
    MontFp!("18713431008795365443461282953641435687980426361389293864334439436704507733573"),
    MontFp!("13524521531382849294546481400146032442880400372519058964811552738800021357286"),
    MontFp!("16486999604400000729349040031969471817437888098739972850346575008621523930969"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("20523188198999497471877161808715641764236782466276163167078486903768014197236"),
    MontFp!("11453024094694914538623795892179529269313443635850390600385486194281443994485"),
    MontFp!("19795691990190512628500988872801943664416434784602799376524725521672086983490"),
    MontFp!("3399230084512608700009971953082683130441084459164257412386077090679260473614"),
    MontFp!("20526692693990573999994746645487478272420658732832770391324464613818432736426"),
    MontFp!("2427827580824101645486087849556388042197271120661974496701974339147843562002"),
    MontFp!("10641933316711323511891770891913780068104213589865091818677107333299531393118"),
    MontFp!("14921098982193753298490489738681637608956547562876275329644174484500110311569"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("20968085489557910912773964818952951722205602862445963609112412175563430998626"),
    MontFp!("2694830617511647584337964081025272104337374528939016034077978656378128347409"),
    MontFp!("15336637727890946286393558831446467937443565957211295054423174379555010527147"),
    MontFp!("4706383159045241893940387686605662475471745016045110764173000223314122994253"),
    MontFp!("15066477603628506973118257648553007329738524726379008394789961374475093445415"),
    MontFp!("16336358721547553664556270515149357269878139841519999351900292551141855202430"),
    MontFp!("15451223932474568086845981696478625503479687302452670665647563136881242508271"),
    MontFp!("6870941906416553366410072095234938744762329352119824834110457085723720297773"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("17339020187213000062466922170707437859376418325671965781201186952968822291183"),
    MontFp!("12570892674966381748506392902443386346912456789072289631194674324400633981998"),
    MontFp!("5458088122225032140776530904012736972822274258554225106828416309935803792862"),
    MontFp!("6788306627809500508032890829385533144904041421918698845401556464832493103735"),
    MontFp!("4640444418950607498436268308548249160898336996061095949759080574716129318536"),
    MontFp!("7522678491774113957982275742770701390093381433742421259372710866592747250062"),
    MontFp!("20568195374010514917415245820834777972950739955228666136718472789491463512274"),
    MontFp!("20654903318406150711211820174551119994602894456631421033816630052352330954334"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("9180562073121369743009722848221532195646827420727811506497836922833792975020"),
    MontFp!("12199732009339752147596240304617348297053562671523679049941748242198238296585"),
    MontFp!("15033180151853727489410583244748019901977165707827544540368123806747436308742"),
    MontFp!("15518415393941647552085210227280043052754010082396406086119006766313194711618"),
    MontFp!("7499034421311965342562757610984279083380997877932104610190362652868238552363"),
    MontFp!("5742808848744423157631197064431338133227355400089836105638861737290218577602"),
    MontFp!("18223403433014393190035673361435578929927165525481306910878218878803017641169"),
    MontFp!("19789990807158266332794636486214296067859691292190010385040613499143283344911"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("18505414592902094959700886266997919687224712779738716629576547442297459727474"),
    MontFp!("14989558640889180150179035979068661124386383853021081523288731603895936091668"),
    MontFp!("2111380105202753109680565466968174077927761792018369192209324673839622633645"),
    MontFp!("14074862267424931294644105048714148484958011995761695211095541248065157493720"),
    MontFp!("8723206913428823126469694547521130906988348962686186903721483155111043328292"),
    MontFp!("3844283878465289222497325391775857147049161162013061154277889454608600928999"),
    MontFp!("4188502822761601219754523140701339698103978670069763664310792346729968346246"),
    MontFp!("15561849738137814069795141284395240728723570032841952486671054056364200690164"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("10394781303613648886302329330327501566167130728540632922787933975395381015005"),
    MontFp!("3642975151548678631623747214209943184651218273974378259112564845251872871292"),
    MontFp!("10119279596217130677573165586333007474857221104655190940526270726648973947712"),
    MontFp!("4767389774600330819587774886105584379286666083933154191011824233026705233611"),
    MontFp!("15949225017756783623181984027765959006937153386126570206074752182786099555049"),
    MontFp!("13150704038909794797027039563045103970970697586287950634565315960320470136792"),
    MontFp!("16911518892006951189930869544176191431062516209085455615549949008184865040792"),
    MontFp!("5744803413351519465722597078689218100804131157523230695567841649116036689598"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("8229670341442464857793443901163554222538059210641564017903214747909372012613"),
    MontFp!("694836155452584595790288950751336131478048448687356655381587905081127689111"),
    MontFp!("14314216517919482536278206217017337578156257443412192374112308567912577500784"),
    MontFp!("5695247806412447057805448109043969983788532288057996842410082981583128463718"),
    MontFp!("5733411254105146638580181151250052610905040218830896264977295242926181137407"),
    MontFp!("7510910201383706099668607069510363320658449399734122827290131629976547520436"),
    MontFp!("2991763956117378731122680671483773853045573328746519852528966212903002937217"),
    MontFp!("9670989197763196338634997632331542024833940388141758889226532021900861532880"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("14924248984067135212412580135594896058446636074104435536992692692501590506514"),
    MontFp!("5855353699972889004842755424271148311019747257566274354741823934078133552926"),
    MontFp!("13610804392615568840500635242866308941706182681149217955227608915623404527295"),
    MontFp!("9182478590311209726963305626141616078963438498943160869070663788501230741810"),
    MontFp!("10033985384027143816578880305752478039595339840742408809135175901065331391517"),
    MontFp!("15305370724890534915609602152283066966050249355809496790635646840156731825559"),
    MontFp!("4305238217630985832276115123431652414921558752104403004852899483248761276297"),
    MontFp!("18325652596219288832080126325305190235578120868479844784678327063499940947187"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("6123251805685633183020131008128329211546066155347671542795968112834762630802"),
    MontFp!("7403600429768595970328784885246261174136887556920076162599878808845407976194"),
    MontFp!("2121310542248416292585008039354737685823341935949215153744651501356845176744"),
    MontFp!("20128263842824336236993329319999916658762686846013742657138513841849782791489"),
    MontFp!("3862700727205238976316694582794200058844464521575634341742179806513097529091"),
    MontFp!("6612518627566112832157246464621688771747051124619679403652939593472676025848"),
    MontFp!("1610887722713703236989743876930589324275965759457585812094953442636549025762"),
    MontFp!("4265019942959749876888267115799639495050370004200074938835220863832913371563"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("20525430619154613049689877524051909173383644741581792827683755479522459283511"),
    MontFp!("16919246526528063380908280412377826784014301956991653246106074170722124495995"),
    MontFp!("16286528846475620300905898667133254936406059211173675053515149795303367228204"),
    MontFp!("18298291272279191195832575620459054482694702683104098814989424884755594803942"),
    MontFp!("7697335663461051428355582543067162774803012434644586679506382063575373682499"),
    MontFp!("2201476822173362713153836543122311553621364230131244562571767982388702377548"),
    MontFp!("19891889473435604661119977377981491262232219141144665938053061002646933653674"),
    MontFp!("2621237074194954699623758733218702682756208143223432762480121009212920867086"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("9211985439950136418239968013864107508806217665704958891020873047642195036028"),
    MontFp!("15353402379834348576715102320888972467008763394514908019787339470140354062347"),
    MontFp!("6747390821698480715557624850001580741217491000003607615963845169741623391924"),
    MontFp!("18161580047666432934728877720555431799472390344905666474552928676398084617698"),
    MontFp!("6421615190922982843899153265978120949372245793825360363663456317907437153930"),
    MontFp!("6060451051531033204194975777920833349505238752057303293896125945530369538246"),
    MontFp!("10214190345253443704233554515728401508710505344779933875987100720657868035258"),
    MontFp!("3966726626672303898952878240898365872867694222764491177329425847826696467498"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("18141645879440198949813580317575581344868865308774834380492054175951445212378"),
    MontFp!("9007998182980414294164135517387246279713919564531321583735576114897105696876"),
    MontFp!("13947520671325767342595836936623423506319706085598494829977399142390984738827"),
    MontFp!("9870250266481914293575354254566686997475638329755362806810760621122260746095"),
    MontFp!("10216683189585215401267007937860069711891982277146128192341169737004951082041"),
    MontFp!("9247303080856448567416440233985193288935455516787304076724342168951188396880"),
    MontFp!("13911371012020403645706082393675788132729722773820959946934137363403121672205"),
    MontFp!("3892095502648924672826025506534390831686389995864849874684781191812034101375"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("223034736528648356245269764409495687465868512300608980906926045340328697173"),
    MontFp!("9122690517811496310008342580447679376802310734357512707842212091354034701857"),
    MontFp!("16515799194598924668737559363539914367713928976272819370960098014974458522691"),
    MontFp!("4863299030962667394404541376045235716098440546251562929860420144141225534846"),
    MontFp!("1936815809135608803475065137089863446328359037058019045570076484918575071752"),
    MontFp!("19561789186695353160313226518281559466406633577874143120315259980781234347170"),
    MontFp!("7936639006206786629579687991335498663600090501056977669621167307820058830878"),
    MontFp!("8866005495835839352861487151959410099354447531578287366040607860579996803913"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("21325513019211283619012404583790471642812363663297275847899100298884582437649"),
    MontFp!("3757496832627195929923388387322776211841354422905824174000012716008445058621"),
    MontFp!("5758729652710188117363653139816041896876198145044666000969604281023703358700"),
    MontFp!("9457717306610808524478988168576313246185292504165469883359283400787266184884"),
    MontFp!("9325018667074079852796176096705260402537123101867434591444179636356270991650"),
    MontFp!("9590099764234924682694668912000894621799500313835977621960384466144029546647"),
    MontFp!("13403486143928121089268590862212099936050941393614006414432036324751471303778"),
    MontFp!("8620325244106772932187869265104002039615968783551160648270364588825650535192"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("13128403422574360605932270381323739355415939690976325597721271395506015157739"),
    MontFp!("7800733686900914748291874207162974502417435385887973879924931664794992576525"),
    MontFp!("18455428198726920310154934140961144490951027935157096530891694956983126514273"),
    MontFp!("15833516073804593869488239806147924174778813243784367368602858569378620544258"),
    MontFp!("2124177461948879042327290023487064735848530252015218265907958194312235303303"),
    MontFp!("6014001188793217699185716390642142271870763422743010487987954637891142212356"),
    MontFp!("4176798710183733470340689198381632167945260003519083680388173074404899372589"),
    MontFp!("16682778060894857266008392304742772163523643435500316777079727106386215720218"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("9232776665094924282626106325822926019097672656690674321168644020128606028547"),
    MontFp!("13503899414202258451740459412368682891102993397196244332594607553373911951484"),
    MontFp!("4742603397338388073461170962870742598484612521465558401445985340141221030575"),
    MontFp!("20583703393057743333467360524130459128319224346720582795943707689192032622261"),
    MontFp!("3513184535939320709627927360496376726992439708755661944274407114055832871753"),
    MontFp!("10342262330580568978752041645597430012877747633588113400914784153007837008602"),
    MontFp!("15155321290735526660797481584420316410519578399070801808985088355923515318043"),
    MontFp!("15945150263386054642167848772548677817232581515283890297573904426466417894476"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("13084332479239836985284191255595459808703787275523930986311802453625457230597"),
    MontFp!("16043473630611582133072440012800817752712076300295740665152652221951596816986"),
    MontFp!("17990414106801212115475539688984711734640349031835767410530220061355904904116"),
    MontFp!("12325894462358672355554572343358205968365595563187766546727091374946455399689"),
    MontFp!("2977637561726485761630225143185882534124579339484850042326164132081226093659"),
    MontFp!("13546792674597528499578836270002689115796075734799480589666504855535988191776"),
    MontFp!("17321246565617320436553667704546798896046899067008978109698839406234331666677"),
    MontFp!("14724790908959933083390754692623000565489341271679210671239544325701572903612"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("10021543233059103850889174821541751041142412091441018932347521780467223530003"),
    MontFp!("6007690745126830737182244004690615082070871326934672418818501827922811773566"),
    MontFp!("16630561044715172296071379159252048463983704471458953735077110253777814092284"),
    MontFp!("21338272628637136859984184696902720616660413036587696084554874876752044775743"),
    MontFp!("1889161957677807869561620773126107003507259196767470674887031002742063921423"),
    MontFp!("19460603661667463029067156700613509071053327500068851925959138089053817456172"),
    MontFp!("15703778487432705530641997534240495017239154861438186814041691753945350966874"),
    MontFp!("9565851913000916163996155271970612587441105960316712016326791198248318357562"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("8513802261633674466821697187895044887678841467461235789695417627069522643334"),
    MontFp!("15747814617844101905276652012608872884204243070440109999036721855999591196265"),
    MontFp!("14355406278873482740793662793955567078761554657923431480300651244480352476305"),
    MontFp!("1814050805418093771654425577120412704487551003027338600633969637384941669952"),
    MontFp!("18076221915636971020206603486685968206903084432339954381586931986669714702854"),
    MontFp!("21670439993692089757331025047031861678361826972609136367815689209686122914815"),
    MontFp!("11369036975850321322885039842401785841421597329525842738397994592500862406652"),
    MontFp!("8339113547482386002225484994176569888799486424896600581132270079339301309120"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("18479825322088598701137909304282957734333457015839769406718737512778813588108"),
    MontFp!("17579081022779704180502986568874496938654710297131544896633978389317355090820"),
    MontFp!("11120226415984824007133643072193012127867828323178621389088167428565504824733"),
    MontFp!("18431654508189019722608399223510033553531559369689372692219486290128812881322"),
    MontFp!("8596090147947339677793949268164077128880029560333148490681323113831039014766"),
    MontFp!("17011682116009774597479190011642382056500461003264060405690730148960148737758"),
    MontFp!("12938209673022853731763896046949688309559628153020998946227012254947768109353"),
    MontFp!("2732859620330119144658320462388985583352455106542657039265510523099889389952"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("19113663757389373737355595014271650965898187027045123602456069799392003141632"),
    MontFp!("10636527267640355080344227478463198241015272927804758590833898103061261170235"),
    MontFp!("10005277387421980785704817524502915633100048644640003884054243515688360450840"),
    MontFp!("15761587772579851761926447257611909856905029108952756813035335754999715998917"),
    MontFp!("2325866351860659701066689500380679186049021969089502277586956371600528619896"),
    MontFp!("5369284182045353703596047677154237480532972989466197818951369725087602132806"),
    MontFp!("20587546021626783636828295336911171829991078873239060474641535421585885852418"),
    MontFp!("1736301216194601614701084000765416831149848657519113005014851162089172057478"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("10309548735282494420938692141316126599610806458153384763101311329972612396690"),
    MontFp!("20277652851204391743682574671383123607407210041883917378059120939904895313876"),
    MontFp!("12243669358935007412900939773466366151456369856242626222237307046144500064395"),
    MontFp!("20129379838266771248288133903693168015584342340909676367653014112930722561262"),
    MontFp!("20437346540623062307518178846018576350944940161576006326941305998394531762197"),
    MontFp!("13713862155069787203119565292266267760530845288365159204930867525886839021744"),
    MontFp!("8968864103626894980174561349015017175419684577719542083071488042495034756931"),
    MontFp!("10576587780587841051660237246869686200484325974330028970947713757003477052289"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("2306154611910246781407907242685693524974944859659127466227949416068347768316"),
    MontFp!("19785857836168484189921773774245995939430111592249281042122956093249244462185"),
    MontFp!("14427384605024735219228250158693041238502166970102723837024122121130276502587"),
    MontFp!("16559837945456182532875047559533279313950353371803641932571084903918727041447"),
    MontFp!("5485650376513859467573957223332201895581703897290145221852683889606276808342"),
    MontFp!("11773060902343134844654221365925299450225639172150007065220177539401529484635"),
    MontFp!("10325537381736578771740959742987562232607755781011661326596261316856872213677"),
    MontFp!("1068607902914388432820209969145854635888630955603255851949857299045816248118"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("11826733508404063593980350493339629620875873012895945121139286985473897951079"),
    MontFp!("19541851217386301688841555303654954796647103917216152361062492167288570901086"),
    MontFp!("7358742757091516325896973455032100879506905782216547585974110664397342888421"),
    MontFp!("7812935375961476474884917583452024334853459231016183990766905986544853234375"),
    MontFp!("14893527164732999811235964170178318852330520280309109345200154091213889453131"),
    MontFp!("16644353856797106266336700338461948821455329523681659638051074138499805247015"),
    MontFp!("14366420219235559451559778002293180664072126430991107398380132316529435640588"),
    MontFp!("14331955534471985185836482645356115337777882343310712804866802255000704127577"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("7957465153116438507044456320701326860269976769899838923825166736161941054750"),
    MontFp!("1361116947025938262052663110143472254232735832764313674336620489714999287476"),
    MontFp!("6694785409547872915882423913121235720501280012268731282042695274545953508553"),
    MontFp!("21714702960528869633379121364876170351170111370481562248054599483382695556536"),
    MontFp!("19811696915305766415334320118779546049654651634416472638472864349631378928253"),
    MontFp!("12454582620240296589481858243037453321229414405535536678878650655714897736800"),
    MontFp!("3632826167857174515925936959147966391337879962986971117158222917136380341832"),
    MontFp!("407059352982130289456128437981487257314979176699771974837930907782977829674"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("2816792857336738480545366284678158631130999919209458786724450883448519741302"),
    MontFp!("16146821402588168451263560409829432760405460209543707880270674102351355613856"),
    MontFp!("4360771978647895221197321082116353483686329447658343398752266078356226779340"),
    MontFp!("10104710758913426180227778846758895624887868113180125233012085956745529793900"),
    MontFp!("19157028700858170544535772589262288873820531424586304107189141600270561488374"),
    MontFp!("4585765664202039351817330269679482364325712234026377530018415653701100968171"),
    MontFp!("20313157265339327551724895457263036227971464270891856657373896954216694587903"),
    MontFp!("986314634214329187509907827404369973792870286506298359335603525533178099877"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("2905165221882938054977611774338394071641663672682890111977246560018406884535"),
    MontFp!("21664856498661074869890878734866824592995910187171554493129266066967697118986"),
    MontFp!("273507958310992712652987785317657408222031872160985845428847793451204510464"),
    MontFp!("15516744387107729370449705492184557427792844438967409332557195354387405763217"),
    MontFp!("18971109576624717630581726581594777805629016382353749801693953766377635446752"),
    MontFp!("8596914203280986727889130763103557293833818017851706947618409775062756575935"),
    MontFp!("7135146980505480960680742365908853622291971552303541837047929874387389954639"),
    MontFp!("986905810952083591735143795282451430697847338324112280059146503413626073678"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("12884218798770460607163265354386961409638969644040984512609893816050372123940"),
    MontFp!("13511777291517608321689681861093218913384527769108388311454050070332091330933"),
    MontFp!("4842091935761293651747808498449157768082035169912416892119767204091030508421"),
    MontFp!("5900396005136513718802065333686351073605012423312946372468550301699335389224"),
    MontFp!("8719574811639632557440343105573569190195437183583267457582924918255734114676"),
    MontFp!("3505358656613840884808634561504253919155597963849853604798994494842270791876"),
    MontFp!("16271108188669101213247310336454340074050084914162723942064610234465780445885"),
    MontFp!("10296416550511028177118174207148598083325147691059171066992526498611691814597"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("11517759261029391369113905172434203417707337199642402064827719351031232778902"),
    MontFp!("2456779168698694078232229541502413544497752130692572074291925353425652469682"),
    MontFp!("15703027058138983474238460755199956248033800315507516781827552184852381935710"),
    MontFp!("7677832530448990001315349072670659085659301138326370513370473753399883655514"),
    MontFp!("15258521776556899711050428991463988936927429785010100702808493536891415560610"),
    MontFp!("6539983135518837052460275553198130722072214908978391690528408531290719224977"),
    MontFp!("13946101876755206242138315437704692952807054038783967679377049207716818341706"),
    MontFp!("16539814663536984876105957457358318268618908034105609350225632475700742700391"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("9179569566054082720654785182562435569766413675164732884395855131364605431871"),
    MontFp!("314968641089207822519079780124875516814296267249985392985336625416074744443"),
    MontFp!("5137865956454430421494165203147183016772314529656789853215159476435227921938"),
    MontFp!("8832081346774589655011217159244066891942893979137871497523881064852131842663"),
    MontFp!("17840550535247676626397792048396672087633182353133033969036720511155441879482"),
    MontFp!("642756156249681499194388832136701583623199510411893928427472769738620542739"),
    MontFp!("5067526250806530657248677683462026740046586033009690858016224176599966889088"),
    MontFp!("17290407100295754995271834813448987883733876210424209455640981521106468740543"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("6318367368339812266938224704884750157504464195203410098174129656095190580920"),
    MontFp!("310403227818896922750538693963853993875352726225882530680193681175437700333"),
    MontFp!("15233886144436957149377416316944300737075476160821088601128475822189316234847"),
    MontFp!("17724737710561229493761274989171764243281521164748720978081531880096750363752"),
    MontFp!("1556900577460767416839791313498240086091097510271607496253728723181103452070"),
    MontFp!("9831191485772795766264259323481391629258350744053782213117926361310528476495"),
    MontFp!("4462927503485641901156245312624037827565103866288018240211939303574481480034"),
    MontFp!("13399491704189720851753822617950356280913184800096492702532843178278239916583"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("357211958273798454518917862354779135818604773284374832150432183644523717106"),
    MontFp!("13844481724929440531484458209653205392423484416008604532945765365497779911841"),
    MontFp!("16270339075246818279643883826668464607699165586936175297064359231420262681306"),
    MontFp!("7838451829844331585347693881530395457379561954092790380108416676212528871441"),
    MontFp!("19688282333050586555420141588635904139179701947310041686004932928697904634961"),
    MontFp!("14249461559414402720081012401738704606254956480715425722035829027999881779860"),
    MontFp!("7908946418987859645800389137085131231163930005179159600355611718852754582640"),
    MontFp!("9432456097870021509130712216871062114572702834066164960614384100194470791332"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("19352954980198731760586785668618420197141360683009760038577992919640969111152"),
    MontFp!("2548225147337750479464555947261998626490264603860883401136401675427801086000"),
    MontFp!("10470580055377574770453869502608834683950244718578713898691847021304378916558"),
    MontFp!("5150682764628724114746364674301437856165735363562958882292209708460478160507"),
    MontFp!("19057315681171432109856008441248572630244396445291698665676195130131833029582"),
    MontFp!("21144322991711241805818937985369274773343803966161768579907747062710847880648"),
    MontFp!("18050908098841691516274520316148294781185145025134819260844692474937143689845"),
    MontFp!("13977614832994811495663192750048973360385494741965797988236250287388321568046"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("7295588867074531260490052117439780979063200498601541957556450076101755402415"),
    MontFp!("14071489291573511898143962609710227375282170145802548221485999127505232688067"),
    MontFp!("11961361963900603917498352773790209431840792878612102661578585547914389205531"),
    MontFp!("18759665238773169635017524783905996761500935258204356479642128599884334685110"),
    MontFp!("656327041884127287875294015476164889364494065775774248043525020303375610331"),
    MontFp!("21463324247661214196246613930102961864313765819643322183675773605055003103825"),
    MontFp!("11670631555452200685923965297422985602864622855020602856498376115132257563036"),
    MontFp!("6049585749477867410866018219546970854144540503137993997205070009859039110931"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("17540162816185114050444800142424765252298500995147104353165500518381637165488"),
    MontFp!("10429080171288082770805921652129056368556125989045941530993095495769860457205"),
    MontFp!("21497244888825083152678260647354050131395360135122611314762003902516110023820"),
    MontFp!("7958593958907139434923956961477459781335344774723909986271602659209319978946"),
    MontFp!("16765190080466797989834451240077061323677689728491996500994209081767004545951"),
    MontFp!("12505304252876147676988911605935761305092075854944447525020152129792449199565"),
    MontFp!("3796153840417909866901003984245929077596107394373922369359388064097404058586"),
    MontFp!("186959874741397788993652349827143789244224322164830996077620544007788129463"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("4118156135267704062106738637607638901094874371107739362475291139427168896554"),
    MontFp!("19561577634511301924696377259620304946781999079286255078831313090512673526582"),
    MontFp!("10335492910769120519615555098922779676878989516495788655143555797114809207722"),
    MontFp!("19028492914695642965017359115563901193040297206724243609621793276538651574359"),
    MontFp!("6033091758564624854955138273296432229139951106747203547967219199788842655120"),
    MontFp!("4703363231435958445464299465480754027861609624259622635853109789798302478152"),
    MontFp!("20287656731059231999509647753654223222198620972313771833050629489872140934722"),
    MontFp!("14295034421635213694983617034181142289163366031966139027626725524967615772240"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("11143305465418010365556840675792231161457696586901037005529187214180598182200"),
    MontFp!("15513463722955075436074296511109483579329916321173201846100001355779032772543"),
    MontFp!("12287589888391170493411256841313749790640659847338010023838327267278616989518"),
    MontFp!("20641251313774436983150608766337995934807277562824101015894144816875043128866"),
    MontFp!("20871456000018033033822720841631925122687885997158150527436900850760919679360"),
    MontFp!("9355465118903045545252332747643960972329663605360501093697243455316261923287"),
    MontFp!("4118374108528270003955638550266433627280210906030842212579022505918791999390"),
    MontFp!("5728172825734070872182758169362424010330847935248224599683601412513209802195"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("2411638786308357277075663620985067966795814899611998785382228342381279243586"),
    MontFp!("5415336847776221986942092508482216076552264308941925077020543746976637216257"),
    MontFp!("9959396019599255330294654939529240436539041886209282080328923731210197821708"),
    MontFp!("4878829895874062158470152442184229396268461839687927616900851061286978301507"),
    MontFp!("16660026277730175026836190908659204493040803689031142368105267968242172946931"),
    MontFp!("13965342356610205131152855820108688832814262647266538861741505196758815092131"),
    MontFp!("19662820600233289904677785312082726794271804569163955855381115704143826491704"),
    MontFp!("3523301405174413612367369458038091453036308842265624301710914422866821126113"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("14438248880683092209986549036751140921871738511766407568708801420507356743556"),
    MontFp!("12260195746382765365099419265028116841677425825961415285731283053153676372221"),
    MontFp!("171362916032738102149986377831358230663649638212072454332667101581359789354"),
    MontFp!("19214619343192115920706673965397267633439981172285993481688364878583053345125"),
    MontFp!("4868763464940252682689024791605719708404874944850047005615756355824901322933"),
    MontFp!("4090642054284970189374427317338565348459904713448557806346882670094374009894"),
    MontFp!("12505755466923422138307397520954505360692666712868959530074716532180048371384"),
    MontFp!("10589368564845413490608619347525127816926511317059033815849369638287338528093"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("302746414473685645740371285487099507466167187481684398701861012454475408489"),
    MontFp!("10254078917190180371466553691506294242132394355752443088563779608954837683755"),
    MontFp!("3332217212588182488875174174415192070657670780728150337581787105088529149534"),
    MontFp!("16234948557515754661443976070865659542335605615788985077056271431651015084269"),
    MontFp!("18784384053627781327534799987354925767995985189743752836668229211254978874405"),
    MontFp!("8701862139819108012602008586704552913861107623777516907728414407129380613543"),
    MontFp!("16606834941894001773926762332487318926644871311049280545018755700800836547842"),
    MontFp!("17832282885935708405440687421057098389700312712342438515872614525637831404587"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("7358372285893466391551150833277896758364394407186592759651153743795827101246"),
    MontFp!("20709384725290513579997956668621091343393710488929852996355482191255680430138"),
    MontFp!("19138822665966823736257088133537062863734613475482910214295982209456157664357"),
    MontFp!("638506463679068178401702705166244924625500542249625628871452672857550774327"),
    MontFp!("10470650624265064017036186055935466143863647300548973711098267806124551866224"),
    MontFp!("2532261524732203221148758452257095252459194905192040643916311784495623086917"),
    MontFp!("13855853109645972639204787481630022610123657966908626760942464974367302598648"),
    MontFp!("13664384207994386167381414196642360192039160051715933820457031558431217407469"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("2525766269257873619703853503805838639320138922534466027965984365846610595288"),
    MontFp!("11754987817879367209112475630628394715918140531696323634011321214771083097053"),
    MontFp!("8054417066168435953978250648211373531334711956098212389158476742763185330311"),
    MontFp!("21062722113526602196569860391065415152907344086635920712704706961418311618874"),
    MontFp!("4445280564505898799604537651879514685821821439522135107040969718420358502298"),
    MontFp!("6126849830452259467130480991151912794491455120140143752345486722334882699856"),
    MontFp!("15609399956390848430786135229957273907735055621298027661640402467019251300430"),
    MontFp!("19415120843133853249805739101505358217545275188344174892488589281642723919393"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("18146879089154799175617175284941092227977584759762703809012248183653099986846"),
    MontFp!("4314982275096342287912788278420592166828097883783002946344872203078833061105"),
    MontFp!("3428839734227204355143659400667933953708164129515103426107980240134387188382"),
    MontFp!("15057244646449783104843714882518796546241756196023931076406304626735912778985"),
    MontFp!("8613022930182521695079921700112262936274054152925791881087583683802175126692"),
    MontFp!("820908003393864212409972255463338680132562746654606011263894252051872711235"),
    MontFp!("8345867393629720883303602440183365516722356541968515390916917993936474806694"),
    MontFp!("4271600040970493068714526759938957472673178076389486325936173472187500035655"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("16333699116778752649147171411209430364094187712160869013942400260664226246102"),
    MontFp!("11780070503839994260205297792249952099556516719978445953344686905693926485518"),
    MontFp!("7315688421604808512808486115310182650002568138220407264727925438731344823358"),
    MontFp!("18374396977409211350409300457192634802279084381446029429933034609839140454251"),
    MontFp!("21176449332472374436649897965929581427520618584747972501388572072766042666476"),
    MontFp!("5631014816503062183472959336947560648264872341675242775461247130019764739716"),
    MontFp!("2037031003749955990295597249726168816072825976704500825796066565308621830418"),
    MontFp!("15430211763605030669369163528992608949028695277487877382204963806394219122790"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("987660922278098578287940117045974076368109917678753530150362347916325473424"),
    MontFp!("15400607163192088584264298062541790889177934109761703464977711962818266769518"),
    MontFp!("11234353957681194881607145229808666229553749534450463345962071395095659189818"),
    MontFp!("14195843741934246457964029636654663563530240721362819291741657932549419702239"),
    MontFp!("8615027620555791809171238470597698042685267872097907506192134406639523475404"),
    MontFp!("16398292531180406337749931345052635142465134402001178535074098699990132034712"),
    MontFp!("16028875209019701257887100528246615700891600032929101290791251989595288493123"),
    MontFp!("15146817604217113765241088238922434044360843957068131628592809463280334723654"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("6409940518734215252345165711174164212931500016656345645611375315708905497534"),
    MontFp!("17816205932671579319508388648225610745259913629723110043099267281756737984959"),
    MontFp!("9774200426456164292647598684114837335066049418784881043987093111492451917823"),
    MontFp!("8617302741046699560084681322123433790602056588488688292909698744038327167628"),
    MontFp!("9014971276722824659534639203434378557458418319198070281909103208898419445561"),
    MontFp!("20421713340414029503094698612423565227370019830839734865689233169688967153822"),
    MontFp!("12453183463309961412170203412350152770784744206795826232517838634609568750325"),
    MontFp!("15621043744324411483766356952000741923846461257557693351519048332479639966045"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("5309659776298431913964593328439937426930990229678651682564279359401002710190"),
    MontFp!("17891373437420138893026201932220074743955474599708526994086893192779457031211"),
    MontFp!("21619595963770780619484796865346477590901834123138998430907804541996705192137"),
    MontFp!("1569025742349594275826033496224836611806554264028750055950375800904728940512"),
    MontFp!("9792656640738199910625580081402827183672563917174673003707209323851432042338"),
    MontFp!("13958494496385004001521203345821468060141449585211804156425645602495594259575"),
    MontFp!("761274658428339555300511101460304316736490874970812652661978125523805644792"),
    MontFp!("18287448709581813752076134063371621901812593295668220665966022237901570672307"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("9258116797369131486929586789998154499271453119687390178634713811632485184715"),
    MontFp!("5698252489294256739570846033009650063909745854426198296776259664021805589941"),
    MontFp!("18198779909293935969141564445130827270920271199758250730472592483058889750833"),
    MontFp!("5029102753320890924418141589518615435815279780891500447271272133023730706260"),
    MontFp!("20632590372221704705067159033797951681447630004894128135658250538416630108227"),
    MontFp!("5297216732744943083388589876787538964352600693690910217930774634755398707767"),
    MontFp!("15315163889081481395619633888045977772641480706526204859457973230154503622219"),
    MontFp!("6232279774255150554787066060443256435488776454726006357194027416565691723208"),
    MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
    MontFp!("3788880395583728594545001333771679767903390707184903981167688200799188349554"),
    MontFp!("21458050293856763961278863988005853193341437507347942942430499810224338196781"),
    MontFp!("9585777794515128542357111340460473079447784482825295145738512456788212721257"),
    MontFp!("19034532566048987292470339273133171201324438412262654433735394177322155534171"),
    MontFp!("19196309854577132760746782449135315310664418272926255500908899397538686486585"),
    MontFp!("21445376105821232747280055223032050399373725161014449207033808524504027971613"),
    MontFp!("5539100337780919206842837176908516952801756637410959104376645017856664270896"),
    MontFp!("19055249881366445073616526879263250763682650596233071589085239500077496415637"),
];

pub const MDS: [[Fr; 5]; 5] = [
    [
        MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
        MontFp!("17179611066821656668705197789232102741366879862607190942874777813024566441829"),
        MontFp!("18653277315487164762584377009009109585010878033606596417396490909822722930739"),
        MontFp!("7373070639853668650581790286343199505413793790160702463077019294817051722180"),
        MontFp!("4823864393442908763804841692709014014130031798360007432734996408628916373879"),
    ],
    [
        MontFp!("19196309854577132760746782449135315310664418272926255500908899397538686486585"),
        MontFp!("18123132816088485879885148351452823314623055244145916622592591084094232513914"),
        MontFp!("18436594886553181913092702411547018228276047601279727265790147051821171174455"),
        MontFp!("15167500404313194506503404655898040457721633218143681920692711693000769735187"),
        MontFp!("9437986152015460505719924283993842205604222075968464846270136901243896809793"),
    ],
    [
        MontFp!("21445376105821232747280055223032050399373725161014449207033808524504027971613"),
        MontFp!("49684738714301073369749035791061182456037935161360748355432247732088942674"),
        MontFp!("9826409059947591908303145327284336313371973037536805760095514429930589897515"),
        MontFp!("8494798325496773219358794086647759478982958403252584257436898618394561204124"),
        MontFp!("21251937175072447337747316555423152807036003235223125066270735279039060889959"),
    ],
    [
        MontFp!("5539100337780919206842837176908516952801756637410959104376645017856664270896"),
        MontFp!("6297628909516159190915174165284309160976659474973668336571577778869958189934"),
        MontFp!("12792263637464508665199868777503118105486490400267592501708855807938962470650"),
        MontFp!("17254685306085558791725544672172906900581495686070720065168939143671412445514"),
        MontFp!("3590396502942934679818900672232030233017710909687947858184099000783280809247"),
    ],
    [
        MontFp!("19055249881366445073616526879263250763682650596233071589085239500077496415637"),
        MontFp!("7367697936402141224946246030743627391716576575953707640061577218995381577033"),
        MontFp!("1322791522030759131093883057746095061798181102708855007233180025036972924046"),
        MontFp!("20456741074925985565499300081580917471340328842103779922028754640077047587707"),
        MontFp!("9059147312071680695674575245237100802111605600478121517359780850134328696420"),
    ],
];

pub const PRE_SPARSE_MDS: [[Fr; 5]; 5] = [
    [
        MontFp!("16789463359527776692258765063233607350971630674230623383979223533600140787105"),
        MontFp!("17179611066821656668705197789232102741366879862607190942874777813024566441829"),
        MontFp!("18653277315487164762584377009009109585010878033606596417396490909822722930739"),
        MontFp!("7373070639853668650581790286343199505413793790160702463077019294817051722180"),
        MontFp!("4823864393442908763804841692709014014130031798360007432734996408628916373879"),
    ],
    [
        MontFp!("8380530719974972623807135252286466557937412694553903923921959427973229995416"),
        MontFp!("18080298068699864264363905300111582081087118311238099974936512807281778727327"),
        MontFp!("4292457941711076720272099252870116571543764679281594340113312403898430824668"),
        MontFp!("11639179217204474354493062002144500221612887781079458217469011306184601452233"),
        MontFp!("19614051613233100863241640333857853639632309786463569516917933486456952719041"),
    ],
    [
        MontFp!("9606292364591828374770449721549551460158889187056122279466535298453878220641"),
        MontFp!("10397776714754312568632221685196692421451251973782858966994999399268910681538"),
        MontFp!("12042514864910016140782456363196972186311602394803089857107230555624326640510"),
        MontFp!("7702297422364575788992938554145207302557118570090655830982667126881821702587"),
        MontFp!("12026510313835547533454539455278219413531597674291891643797370513430112426058"),
    ],
    [
        MontFp!("4497250607405194134652092401744988490057748636958176595485925260765055397902"),
        MontFp!("21107765198791389627032580566732630411434893305139225989986848324780050540490"),
        MontFp!("15341868808992548385764118684259300464148964551532256547125592277147239111874"),
        MontFp!("20941902230378794867402740339721452478306575664231618376971976456570241393496"),
        MontFp!("6215458017388056604846748005507326289075904169103924451955730229518619282959"),
    ],
    [
        MontFp!("10170671260592631098823883485176685963501050779998775838284547604110442816022"),
        MontFp!("17914409396946720698393546195018890565152083105762714393946804007474334719116"),
        MontFp!("8897285864590087558069650849582252928601573891812582615695098341351315041517"),
        MontFp!("5644082822526653543676195458787444884529937843228615124064820720526785269381"),
        MontFp!("10707592455436577386278848783580995469308889465285933509232651911896187170727"),
    ],
];
